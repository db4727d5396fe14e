//! Built-in rule batteries for the signup fields.

use crate::error::Result;

use super::RuleBattery;

/// Whole-value pattern an email address must satisfy.
pub const EMAIL_MASTER: &str = r"^[A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)*@[a-zA-Z0-9](?:-?[a-zA-Z0-9])*(?:\.[-a-zA-Z0-9]+)*\.[0-9]*?[a-zA-Z](?:-?[a-zA-Z])*[0-9]?$";

pub const DOT_MESSAGE: &str = "Consecutive dots(..) are not allowed.";
pub const DOT_POSITION_MESSAGE: &str =
    "Dot(.) is not allowed at the beginning or end of both parts.";
pub const AT_MESSAGE: &str = "Need just one @ sign.";
pub const AT_POSITION_MESSAGE: &str = "@ should be somewhere in the middle";
pub const HYPHEN_MESSAGE: &str = "Consecutive hyphens(--) are not allowed in the domain part.";
pub const HYPHEN_POSITION_MESSAGE: &str = "For the domain part, hyphen(-) is not allowed immediately before or after dot(.) as well as at the beginning or end";
pub const CHAR_MESSAGE: &str = "Special characters except dot(.), hyphen(-), underscore(_) are not allowed. Underscore in the domain part is also not allowed";
pub const TLD_MESSAGE: &str = "Top level domain can't be all numbers.";
pub const END_MESSAGE: &str = "Domain should end with any name following a dot(.)";

/// Rules explaining why an address fails [`EMAIL_MASTER`].
pub fn email_battery() -> Result<RuleBattery> {
    RuleBattery::builder(EMAIL_MASTER)
        .rule("dot", r"\.\.", DOT_MESSAGE)
        .rule("dotPos", r"^\.|\.@|@\.|\.$", DOT_POSITION_MESSAGE)
        .rule("at", r"@{2,}|^[^@]*$", AT_MESSAGE)
        .rule("atPos", r"^@|@$", AT_POSITION_MESSAGE)
        .rule("hyphen", r"@.*--", HYPHEN_MESSAGE)
        .rule("hyphenPos", r"@(?:-|.*-\.|.*\.-|.*-$)", HYPHEN_POSITION_MESSAGE)
        .rule(
            "char",
            r"[^A-Za-z0-9_.\-@]|@.*[^a-zA-Z0-9\-.@]",
            CHAR_MESSAGE,
        )
        .rule("tld", r"\.[0-9]+$", TLD_MESSAGE)
        .rule("end", r"@[^.]+$", END_MESSAGE)
        .build()
}

/// Rules for a password of `min..=max` printable ASCII characters.
pub fn password_battery(min: usize, max: usize) -> Result<RuleBattery> {
    RuleBattery::builder(format!(r"[\x21-\x7E]{{{min},{max}}}"))
        .rule(
            "short",
            format!("^.{{0,{}}}$", min.saturating_sub(1)),
            format!("Password must be at least {min} characters."),
        )
        .rule(
            "long",
            format!("^.{{{},}}$", max + 1),
            format!("Password must be at most {max} characters."),
        )
        .rule("space", r"\s", "Spaces are not allowed in the password.")
        .rule(
            "char",
            r"[^\x20-\x7E]",
            "Only printable ASCII characters are allowed.",
        )
        .build()
}
