/*!
# Introductory Tutorial for MSX BASIC

Begin by opening a terminal and running the executable. If you get the
following, you have achieved success and are ready for this tutorial.
Type CTRL-D to exit.
<pre><code>&nbsp;  MSX BASIC
&nbsp;  READY.
&nbsp;> █
</code></pre>

 Stop a running program with CTRL-C.

When you see the `READY.` prompt, the interpreter is ready to accept a
statement. Lines that you type are marked with a "`>`".

<pre><code>&nbsp;> print "Hello World"
&nbsp;  Hello World
&nbsp;  READY.
</code></pre>

Entering a statement which executes immediately is called direct mode.
To make a program, put the statement on a numbered line. Line numbers
are whole numbers from 0 to 65529.

<pre><code>&nbsp;> 10 print "Hello World"
</code></pre>

Nothing happens. The line is stored to be executed later. Typing a line
number with nothing after it deletes that line.

<pre><code>&nbsp;> LIST
&nbsp;  10 print "Hello World"
&nbsp;  READY.
&nbsp;> RUN
&nbsp;  Hello World
&nbsp;  READY.
</code></pre>

Previous lines are available with the up and down arrows.

<pre><code>&nbsp;> PAINT "Hello World"
&nbsp;  <b>?SYNTAX ERROR</b>
&nbsp;> <i>{UP}</i>
&nbsp;> PAINT "Hello World"
</code></pre>

`SAVE` keeps the program under a name and `LOAD` brings it back.
`FILES` shows what has been saved. `NEW` erases the program in memory.

<pre><code>&nbsp;> save "hello"
&nbsp;  SAVED HELLO
&nbsp;> new
&nbsp;> list
&nbsp;> load "hello"
&nbsp;  LOADED HELLO
&nbsp;> list
&nbsp;  10 print "Hello World"
</code></pre>

The last example asks for a number and prints its square, forever.

<pre><code>&nbsp;> 10 input "Your number"; a
&nbsp;> 20 print "The square of";a;"is";a*a
&nbsp;> 30 goto 100
&nbsp;> run
&nbsp;  Your number 3
&nbsp;  The square of 3 is 9
&nbsp;  <b>?UNDEFINED LINE IN 30; 100</b>
&nbsp;> 30 goto 10
&nbsp;> run
&nbsp;  Your number 4
&nbsp;  The square of 4 is 16
&nbsp;  Your number<i>{CTRL-C}</i>
&nbsp;  <b>?TYPE MISMATCH IN 10</b>
&nbsp;  READY.
</code></pre>

The remainder of this manual is reference material.

*/
