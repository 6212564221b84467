/*!
# `IF <expression> THEN <line number>|<statement>`

## Purpose
Conditionally jumps to a line or executes one statement.

## Remarks
A non-zero number or a non-empty string is true.
Comparisons produce -1 for true and 0 for false.

A `THEN` inside quotes is part of the string, not the keyword.
`IF` statements may nest inside `THEN` up to eight deep.

## Example
```text
10 INPUT "GUESS";G
20 IF G=7 THEN 50
30 PRINT "NO"
40 GOTO 10
50 PRINT "YES"
```

*/
