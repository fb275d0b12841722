//! Markup legend shown by `markfmt --legend`.
//!
//! The legend is itself markup and goes through the automaton, so it follows
//! the same strip/sanitize options as any other input. Sample tags sit at the
//! top level where a stray `--}` stays literal.

use std::io::{self, Write};

use crate::automaton::Automaton;
use crate::config::Options;

pub const LEGEND: &str = "\
{*--markfmt markup legend--}

{_--Syntax--}
  {options--text--}     options apply to text up to the matching --}
  e.g. {%Y*_--foo--}

{_--Colors--}  first color is the foreground, second the background
  {kw--k--} black   {r--r--} red       {g--g--} green   {y--y--} yellow
  {b--b--} blue    {m--m--} magenta   {c--c--} cyan    {w--w--} white
  uppercase letters pick the bright variant: {R--R--} {G--G--} {B--B--} ...
  d  default terminal color
  ;  keep the current color

{_--Options--}  toggled (XORed) with the enclosing format
  {%--%--} reversed       {!--!--} blink        {*--*--} bold      {/--/--} italic
  {_--_--} underline      {^--^--} overline     {=--=--} double underline
  {~--~--} strikethrough  {.--.--} dim
  #  trim leading and trailing whitespace inside the tag
  0  reset to the initial format before the other options

{_--Remarks--}
  tags take effect at once and never wait for a closing bracket
  malformed tags are printed as they are
  terminals may lack support for some attributes
";

/// Render the legend into `out`.
pub fn write_legend<W: Write>(out: W, options: Options) -> io::Result<W> {
    let mut automaton = Automaton::new(out, options)?;
    automaton.feed(LEGEND)?;
    automaton.finish()
}
