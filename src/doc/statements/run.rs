/*!
# `RUN [<line number>]`

## Purpose
Runs the program from the start or from `<line number>`.

## Remarks
Variables are kept between runs. Use `NEW` to start over.
Changes made to the program while it runs take effect on the next `RUN`.
Stop a running program with CTRL-C.

*/
