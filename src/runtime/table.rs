use serde::Serialize;

use CommandGroup::{Arithmetic, Filter, Histogram, Logic, Morphology, Point};
use CommandInput::{Pair, Primary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandInput {
    /// Needs `original` only.
    Primary,
    /// Needs shape-compatible `original` and `second`.
    Pair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandGroup {
    Point,
    Arithmetic,
    Logic,
    Morphology,
    Filter,
    Histogram,
}

impl CommandGroup {
    pub const ALL: [CommandGroup; 6] = [
        CommandGroup::Point,
        CommandGroup::Arithmetic,
        CommandGroup::Logic,
        CommandGroup::Morphology,
        CommandGroup::Filter,
        CommandGroup::Histogram,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::Arithmetic => "Arithmetic",
            Self::Logic => "Boolean",
            Self::Morphology => "Morphology",
            Self::Filter => "Filters",
            Self::Histogram => "Histogram",
        }
    }
}

/// One user-facing command: precondition, prompted parameter, operation and
/// status template (`{value}` is replaced by the resolved parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub group: CommandGroup,
    pub input: CommandInput,
    pub op: &'static str,
    pub prompt: Option<&'static str>,
    pub status: &'static str,
}

const fn command(
    id: &'static str,
    label: &'static str,
    group: CommandGroup,
    input: CommandInput,
    op: &'static str,
    prompt: Option<&'static str>,
    status: &'static str,
) -> CommandSpec {
    CommandSpec {
        id,
        label,
        group,
        input,
        op,
        prompt,
        status,
    }
}

pub const COMMANDS: &[CommandSpec] = &[
    command(
        "grayscale",
        "Grayscale",
        Point,
        Primary,
        "color.grayscale",
        None,
        "Converted to grayscale",
    ),
    command(
        "threshold",
        "Binary",
        Point,
        Primary,
        "threshold.binary",
        Some("threshold"),
        "Binary threshold applied at {value}",
    ),
    command(
        "negative",
        "Negative",
        Point,
        Primary,
        "logic.not",
        None,
        "Inverted all samples",
    ),
    command(
        "brighten",
        "Brightness +",
        Arithmetic,
        Primary,
        "arith.brighten",
        Some("delta"),
        "Brightness increased by {value}",
    ),
    command(
        "darken",
        "Brightness -",
        Arithmetic,
        Primary,
        "arith.darken",
        Some("delta"),
        "Brightness decreased by {value}",
    ),
    command(
        "add",
        "Add Images",
        Arithmetic,
        Pair,
        "arith.add",
        None,
        "Added second image",
    ),
    command(
        "subtract",
        "Subtract Images",
        Arithmetic,
        Pair,
        "arith.subtract",
        None,
        "Subtracted second image",
    ),
    command("and", "AND", Logic, Pair, "logic.and", None, "Computed AND"),
    command("or", "OR", Logic, Pair, "logic.or", None, "Computed OR"),
    command("xor", "XOR", Logic, Pair, "logic.xor", None, "Computed XOR"),
    command(
        "erode",
        "Erosion",
        Morphology,
        Primary,
        "morphology.erode",
        Some("size"),
        "Eroded with a {value}x{value} element",
    ),
    command(
        "dilate",
        "Dilation",
        Morphology,
        Primary,
        "morphology.dilate",
        Some("size"),
        "Dilated with a {value}x{value} element",
    ),
    command(
        "blur",
        "Gaussian Blur",
        Filter,
        Primary,
        "filter.gaussian",
        Some("size"),
        "Gaussian blur with kernel {value}",
    ),
    command(
        "sharpen",
        "Sharpen",
        Filter,
        Primary,
        "filter.sharpen",
        None,
        "Sharpened",
    ),
    command(
        "edges",
        "Canny Edges",
        Filter,
        Primary,
        "edges.canny",
        Some("low"),
        "Detected edges (low {value}, high 2x)",
    ),
    command(
        "equalize",
        "Equalize",
        Histogram,
        Primary,
        "histogram.equalize",
        None,
        "Equalized histogram",
    ),
    command(
        "histogram",
        "Show Histogram",
        Histogram,
        Primary,
        "histogram.compute",
        None,
        "Computed histogram of the original image",
    ),
];

pub fn find_command(id: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|command| command.id == id)
}

impl CommandSpec {
    pub fn status_message(&self, value: Option<i64>) -> String {
        match value {
            Some(value) => self.status.replace("{value}", &value.to_string()),
            None => self.status.to_string(),
        }
    }
}
