/// Automaton states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Plain text; looking for `{`, `--}` and escapes
    #[default]
    Default,
    /// Saw `\` with escapes enabled; the next char picks the control byte
    ParsingEscape,
    /// Inside `{...`, collecting options until `--`
    ParsingOpeningTag,
    /// Just opened a `#` tag; whitespace is dropped until the first other char
    SkippingLeadingPadding,
}
