/*!
# `NEW`

## Purpose
Erases the program and all variables.

*/
