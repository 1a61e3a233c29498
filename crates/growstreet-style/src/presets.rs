//! Ready-made style fragments.

use crate::value::StyleDict;

/// Direct children of a stack that get stretched.
const STACK_CHILD_SELECTOR: &str = "& :where(.rx-Stack) > :where( div:not(.rt-Box, .rx-Upload, .rx-Html),input, select, textarea, table)";

/// Make nested stacks and common form or block children fill the width of
/// their stack.
pub fn stack_children_full_width() -> StyleDict {
    StyleDict::new()
        .with(
            "& :where(.rx-Stack)",
            StyleDict::new().with("width", "100%"),
        )
        .with(
            STACK_CHILD_SELECTOR,
            StyleDict::new()
                .with("width", "100%")
                .with("flex_shrink", "1"),
        )
}
