use std::{
    io::{self, BufRead, ErrorKind, Stdin, Stdout, Write},
    ops::RangeInclusive,
    str::FromStr,
};

/// Line-based console prompts that keep asking until the answer is valid.
///
/// Reading past the end of the input is an [`ErrorKind::UnexpectedEof`]
/// error so a closed stdin ends the session instead of looping.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line of menu or report text.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Free text, trimmed. May be empty.
    pub fn text(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "\n{}\n-> ", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Non-empty free text.
    pub fn required(&mut self, message: &str) -> io::Result<String> {
        loop {
            let value = self.text(message)?;
            if !value.is_empty() {
                return Ok(value);
            }
            writeln!(self.output, "This field is required.")?;
        }
    }

    /// One of `allowed`, compared exactly.
    pub fn choose<S: AsRef<str>>(
        &mut self,
        message: &str,
        allowed: &[S],
        error: &str,
    ) -> io::Result<String> {
        loop {
            let value = self.text(message)?;
            if allowed.iter().any(|a| a.as_ref() == value) {
                return Ok(value);
            }
            writeln!(self.output, "{}", error)?;
        }
    }

    pub fn confirm(&mut self, message: &str) -> io::Result<bool> {
        let answer = self.choose(
            &format!("{} [y/n]", message),
            &["y", "n"],
            "Type y or n.",
        )?;
        Ok(answer == "y")
    }

    /// A whole number; anything else is rejected and asked again.
    pub fn integer(&mut self, message: &str) -> io::Result<u32> {
        loop {
            match self.text(message)?.parse::<u32>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(
                    self.output,
                    "Invalid input. Please enter a whole number."
                )?,
            }
        }
    }

    pub fn number_in<T>(
        &mut self,
        message: &str,
        range: RangeInclusive<T>,
        error: &str,
    ) -> io::Result<T>
    where
        T: FromStr + PartialOrd,
    {
        loop {
            match self.text(message)?.parse::<T>() {
                Ok(value) if range.contains(&value) => return Ok(value),
                _ => writeln!(self.output, "{}", error)?,
            }
        }
    }
}
