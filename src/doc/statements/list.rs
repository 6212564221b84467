/*!
# `LIST [<line number>][-[<line number>]]`

## Purpose
Prints the program, or part of it.

## Example
```text
LIST
LIST 100
LIST 100-
LIST -200
LIST 100-200
```

*/
