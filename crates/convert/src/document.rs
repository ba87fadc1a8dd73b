//! Standalone document wrapper.

/// Article preamble for a compilable document.
pub const LATEX_PREAMBLE: &str = r"\documentclass{article}
\usepackage{amsmath} % For math environments like align, used by KaTeX
\usepackage{amssymb} % For math symbols
\usepackage{amsfonts} % For math fonts
\usepackage{ulem}    % For \underline, if needed (used by KaTeX underline)

% Optional: Adjust margins if needed
\usepackage[margin=1in]{geometry}

% Improve spacing around math environments and lists if needed
%\usepackage{parskip}

\begin{document}
";

/// Closes the document opened by [`LATEX_PREAMBLE`].
pub const LATEX_POSTAMBLE: &str = r"
\end{document}
";

/// Surround a converted body with the preamble and postamble.
pub fn wrap_document(body: &str) -> String {
    let mut document =
        String::with_capacity(LATEX_PREAMBLE.len() + body.len() + LATEX_POSTAMBLE.len());
    document.push_str(LATEX_PREAMBLE);
    document.push_str(body);
    document.push_str(LATEX_POSTAMBLE);
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_document() {
        let document = wrap_document("$x$");
        assert!(document.starts_with("\\documentclass{article}\n"));
        assert!(document.contains("\\begin{document}\n$x$\n\\end{document}\n"));
    }
}
