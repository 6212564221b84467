/*!
# `END`

## Purpose
Stops the running program.

## Remarks
A program also ends when execution falls past its last line,
so `END` is only needed to keep execution out of subroutines
placed after the main program.

## Example
```text
10 GOSUB 100
20 END
100 PRINT "SUBROUTINE"
110 RETURN
RUN
SUBROUTINE
```

*/
