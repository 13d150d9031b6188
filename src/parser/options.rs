//! Configuration for the parser.

#[cfg(feature = "bon")]
use bon::Builder;

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Umbrella options struct.
pub struct Options {
    /// Configure parse-time options.
    pub parse: Parse,
}

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options for parser functions.
pub struct Parse {
    /// Count blank lines inside an open fenced code block towards the run of
    /// blank lines that ends a list.
    ///
    /// By default a fenced code block inside a list item may hold any number
    /// of consecutive blank lines without ending the list.
    ///
    /// ```rust
    /// # use cmblocks::{markdown_to_outline, Options};
    /// let input = "- ```\n\n\n  code\n  ```\n";
    /// let mut options = Options::default();
    /// assert_eq!(markdown_to_outline(input, &options),
    ///            "document\n  list bullet=- tight\n    item\n      \
    ///             code_block\n        text \"\\n\\ncode\\n\"\n");
    ///
    /// options.parse.count_fenced_blank_lines = true;
    /// assert_eq!(markdown_to_outline(input, &options),
    ///            "document\n  list bullet=- tight\n    item\n      \
    ///             code_block\n        text \"\\n\"\n  paragraph\n    text \"code\"\n  \
    ///             code_block\n    text \"\"\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub count_fenced_blank_lines: bool,
}
