/*!
# `INPUT ["<prompt string>";]<variable>`

## Purpose
Suspends execution and awaits a response from the terminal.

## Remarks
Without a prompt string the prompt is `?`. A response that is not a
number, given for a numeric variable, is a `TYPE MISMATCH` error which
stops the program. Pressing CTRL-C at the prompt answers with an empty
response.

## Example
```text
10 INPUT "WHAT IS YOUR NAME"; NAME$
20 PRINT "HELLO "+NAME$
```

*/
