use anyhow::Result;
use std::io::{self, BufRead, IsTerminal};
use zeroize::Zeroizing;

/// Reads the password to hash or verify.
///
/// Empty passwords are accepted; enforcing a password policy is up to the
/// caller.
pub fn read_password() -> Result<Zeroizing<String>> {
    //  Environment Variable
    //  SECPASS_PASSWORD="supersecret" secpass hash
    if let Ok(pw) = std::env::var("SECPASS_PASSWORD") {
        return Ok(Zeroizing::new(pw));
    }

    //  stdin (Pipeline)
    //  printf "%s\n" "$PW" | secpass verify "$STORED"
    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().lock().read_line(&mut buf)?;
        trim_newline(&mut buf);
        return Ok(buf);
    }

    //  Interactive (TTY)
    let pw = rpassword::prompt_password("Password: ")?;
    Ok(Zeroizing::new(pw))
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_newline_strips_crlf_only() {
        let mut s = String::from(" pw \r\n");
        trim_newline(&mut s);
        assert_eq!(s, " pw ");

        let mut empty = String::from("\n");
        trim_newline(&mut empty);
        assert_eq!(empty, "");
    }
}
