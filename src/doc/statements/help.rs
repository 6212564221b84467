/*!
# `HELP`

## Purpose
Prints a summary of the commands and statements.

*/
