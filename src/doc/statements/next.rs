/*!
# `NEXT [<variable>]`

## Purpose
Closes the innermost `FOR` loop.

## Remarks
When a variable is given it must name the variable of the innermost
loop, otherwise a `NEXT WITHOUT FOR` error occurs. There is no way
to close an outer loop by name.

*/
