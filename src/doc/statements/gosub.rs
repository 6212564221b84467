/*!
# `GOSUB <line number>`

## Purpose
Calls a subroutine.

## Remarks
Execution moves to `<line number>`. The next `RETURN` brings it back to
the line after the `GOSUB`. A `GOSUB` on the last line of a program
has nowhere to return to, so its `RETURN` ends the program.

`GOSUB` is not allowed in direct mode.

## Example
```text
10 GOSUB 100
20 PRINT "DONE"
30 END
100 PRINT "SUB"
110 RETURN
RUN
SUB
DONE
```

*/
