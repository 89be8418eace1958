/// Control characters and the tokens they are spelled as.
pub const REPLACEMENTS: &[(char, &str)] = &[
    ('\u{5}', "[:endmsg]"),
    ('\u{c}', "[:nextmsg]"),
    ('\t', "[:tab]"),
    ('"', "[:dq]"),
    ('\n', "[:newline]"),
];

/// Spell out the control characters of a decoded message.
pub fn to_human_readable(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    for c in message.chars() {
        match REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            Some((_, token)) => out.push_str(token),
            None => out.push(c),
        }
    }
    out
}
