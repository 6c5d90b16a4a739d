use crate::cli;

/// Helps check if a command returns the expected [`anyhow::Result<Output>`].
pub enum ResultMatcher<'a> {
    /// Asserts result is `Ok` and its rendered text equals the given value.
    OkText(&'a str),

    /// Asserts result is `Ok` and its rendered text, without the trailing
    /// newline, matches the given glob pattern. Matching is case-insensitive.
    OkGlob(&'a str),

    /// Asserts result is `Err` and that the error, rendered with its causes,
    /// matches the given glob pattern. Matching is case-insensitive.
    ErrGlob(&'a str),

    /// Asserts the command line is rejected before the command runs.
    ParseErr,
}

fn glob_matches(pattern: &str, s: &str) -> bool {
    wildmatch::WildMatch::new(pattern.to_lowercase().as_str()).matches(s.to_lowercase().as_str())
}

impl ResultMatcher<'_> {
    pub fn assert_matches(&self, result: anyhow::Result<cli::Output>) {
        match self {
            ResultMatcher::OkText(want) => {
                if let Ok(output) = &result {
                    let got = output.to_string();
                    if got == *want {
                        return;
                    }
                    text_diff::print_diff(want, &got, "\n");
                    panic!("diff between want (red) and got (green), see above");
                }
                panic!("\n\twant: Ok({:?})\n\tgot: {:?}\n", want, result);
            }
            ResultMatcher::OkGlob(pattern) => {
                let matches = matches!(
                    result,
                    Ok(ref output) if glob_matches(pattern, output.to_string().trim_end()),
                );
                assert!(
                    matches,
                    "\n\twant matches: Ok({:?})\n\tgot: {:?}\n",
                    pattern,
                    result.map(|o| o.to_string())
                );
            }
            ResultMatcher::ErrGlob(pattern) => {
                let matches = matches!(
                    result,
                    Err(ref e) if glob_matches(pattern, &format!("{:#}", e)),
                );
                assert!(
                    matches,
                    "\n\twant matches: Err({:?})\n\tgot: {:?}\n",
                    pattern,
                    result.map_err(|e| format!("{:#}", e))
                );
            }
            ResultMatcher::ParseErr => {
                panic!("\n\twant: parse error\n\tgot: {:?}\n", result)
            }
        }
    }

    pub fn assert_parse_error(&self, err: clap::Error) {
        assert!(
            matches!(self, ResultMatcher::ParseErr),
            "unexpected parse error: {}",
            err
        );
    }
}
