/*!
# `CLS`

## Purpose
Clears the screen.

## Remarks
Works both as a command and inside a program.

*/
