/*!
# `RETURN`

## Purpose
Returns from a subroutine entered with `GOSUB`.

## Remarks
A `RETURN WITHOUT GOSUB` error occurs when no subroutine is active.

*/
