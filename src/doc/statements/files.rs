/*!
# `FILES`

## Purpose
Lists the names of saved programs.

*/
