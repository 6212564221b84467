/*!
# `STOP`

## Purpose
Same as `END`.

*/
