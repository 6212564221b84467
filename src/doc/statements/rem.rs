/*!
# `REM <anything>`

## Purpose
A remark. The rest of the line is ignored.

*/
