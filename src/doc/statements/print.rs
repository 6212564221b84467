/*!
# `PRINT [<expression>[;|,<expression>...]]`

## Purpose
Prints to the terminal.

## Remarks
`?` may be typed instead of `PRINT`. Both `;` and `,` print a single
space. Every `PRINT` ends its line.

## Example
```text
?"A";1+1,"B"
A 2 B
```

*/
