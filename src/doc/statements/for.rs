/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.
## Purpose
Used with `NEXT` to repeat execution of statements
while iterating over a sequence of numbers.

## Remarks
If we wanted the numbers 1,3,5,7 we would write `FOR I=1 TO 7 STEP 2`.
On the first iteration, 1 will be assigned to variable I.
Statements execute until a `NEXT` statement.
On subsequent iterations, the variable I gets 2 added to it.
If the result exceeds 7 the loop breaks and execution continues
after the `NEXT`. Otherwise the lines after the `FOR` run again.

x, y, and z are evaluated once, in that order. All three must be
numbers or a `TYPE MISMATCH` error occurs. The loop variable
can not be a string variable.

The first iteration always executes even if starting past the end.

`FOR` is not allowed in direct mode.

## Example 1
```text
10 FOR I=1 TO 7 STEP 2
20 PRINT "HELLO WORLD";I
30 NEXT I
RUN
HELLO WORLD 1
HELLO WORLD 3
HELLO WORLD 5
HELLO WORLD 7
```

## Example 2
```text
10 FOR X=1 TO 2
20 FOR Y=5 TO 6
30 PRINT X,Y
40 NEXT Y
50 NEXT X
RUN
1 5
1 6
2 5
2 6
```

*/
