// Anti-scraping masks for addresses shown in page markup.
//
// Only the first `@` and the first `.` are replaced; later dots stay literal
// (`a.b@x.co.uk` -> `a[dot]b[at]x.co.uk`). An address that already contains
// `[at]` or `[dot]` text does not survive the round trip.

pub fn obfuscate_email(email: &str) -> String {
    email.replacen('@', "[at]", 1).replacen('.', "[dot]", 1)
}

pub fn deobfuscate_email(obfuscated: &str) -> String {
    obfuscated.replacen("[at]", "@", 1).replacen("[dot]", ".", 1)
}
