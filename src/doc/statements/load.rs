/*!
# `LOAD <name>`

## Purpose
Replaces the program with one saved earlier.

## Remarks
Variables are not changed. Every line of a program file must begin
with a line number.

## Example
```text
LOAD "GAME"
LOADED GAME
```

*/
