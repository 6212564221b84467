/*!
# Limits and Internals

Each line is split on the first word. `LET` may be left out, and `?`
stands for `PRINT`. There is one statement per line.

Expressions are tokenized, converted to postfix with the shunting-yard
algorithm, then evaluated on a stack. Programs are not compiled.
`RUN` takes a snapshot of the program, so edits made while a program
runs are seen by the next `RUN`.

The interpreter runs a few lines at a time and then returns to the
terminal. `--slice` sets how many. This does not change what a
program prints.

Line numbers range from 0 to 65529.

Variables, the expression stack, and the `FOR` and `GOSUB` stacks
are each limited to 65535 entries. Going past a limit is an
`OUT OF MEMORY` error.

`IF` may nest in a `THEN` clause eight deep.

## Error Messages

| Code | Message |
|------|---------|
| 1 | NEXT WITHOUT FOR |
| 2 | SYNTAX ERROR |
| 3 | RETURN WITHOUT GOSUB |
| 7 | OUT OF MEMORY |
| 8 | UNDEFINED LINE |
| 11 | DIVISION BY ZERO |
| 12 | ILLEGAL DIRECT |
| 13 | TYPE MISMATCH |
| 53 | FILE NOT FOUND |
| 56 | DISK NOT MOUNTED |
| 70 | MISMATCHED PARENTHESES |
| 71 | UNTERMINATED STRING |
| 72 | ALREADY RUNNING |

*/
