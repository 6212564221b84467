/*!
# Expressions and Types

There are two types of data: numbers and strings. Numbers are 64-bit
floating point. Strings are text of any length.

Variable names begin with a letter followed by letters or digits.
A name ending in `$` is a string variable. Names are not case sensitive.
A variable that was never assigned reads as `0`, or as an empty string
when its name ends in `$`.

```text
LET PI = 3.14
NAME$ = "MSX"
PRINT X
0
```

## Operators
From highest to lowest precedence:

| Operator | Meaning |
|----------|---------|
| `-` | Negation |
| `*` `/` | Multiplication, division |
| `+` `-` | Addition, subtraction |
| `=` `<>` `<` `<=` `>` `>=` | Comparison |

Parentheses override precedence. Operators of equal precedence
evaluate left to right, so `8-3-2` is `3`.

`+` joins strings. When either side of `+` is a string the other side
is converted to text, so `"A"+1` is `A1`. The other arithmetic
operators read strings as numbers; text that isn't a number is `0`.

Comparisons return `-1` for true and `0` for false. When either side
is a string the comparison is alphabetical.

```text
PRINT 2+3*4;(2+3)*4;-2*-3
14 20 6
PRINT "ABC"<"ABD"
-1
```

Division by zero is an error.

*/
