/*!
# `[LET] <variable>=<expression>`

## Purpose
Assigns the value of an expression to a variable.

## Remarks
The word `LET` is optional. String variables end with `$` and accept
any value as text. Numeric variables accept numbers and strings that
read as numbers; anything else is a `TYPE MISMATCH` error and the
variable keeps its old value.

## Example
```text
LET A=1
B$="TWO"
C="3"
PRINT A+C;B$
4 TWO
```

*/
