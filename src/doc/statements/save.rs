/*!
# `SAVE <name>`

## Purpose
Saves the program under a name.

## Remarks
The name may be quoted. Names are not case sensitive.
On disk, the program is a text file named `<NAME>.BAS`
in the directory given by `--dir`.

## Example
```text
SAVE "GAME"
SAVED GAME
```

*/
