//! Static label → CSS class lookups.

/// Class for tag labels missing from the color map.
pub const DEFAULT_TAG_CLASS: &str = "bg-gray-100 text-gray-700";

const BLUE: &str = "bg-blue-100 text-blue-700";
const GREEN: &str = "bg-green-100 text-green-700";
const PURPLE: &str = "bg-purple-100 text-purple-700";
const ORANGE: &str = "bg-orange-100 text-orange-700";
const YELLOW: &str = "bg-yellow-100 text-yellow-700";
const RED: &str = "bg-red-100 text-red-700";
const CYAN: &str = "bg-cyan-100 text-cyan-700";
const PINK: &str = "bg-pink-100 text-pink-700";

/// CSS class for a work-entry tag. Matching is exact (case-sensitive).
pub fn tag_class(label: &str) -> &'static str {
    match label {
        "Python" | "Product" | "Performance" | "Self-Tracking" | "LLaMA 3.1" | "CRISPR"
        | "Kubernetes" => BLUE,
        "API" | "OpenAI API" | "Content Filtering" | "File Management" | "Analytics"
        | "Research" | "Publication" | "PostgreSQL" => GREEN,
        "Machine Learning" | "Web APIs" | "Automation" | "User Acquisition" | "Data Pipeline"
        | "RAG" => PURPLE,
        "Web Scraping" | "TensorFlow" | "Rust" => ORANGE,
        "JavaScript" | "Chrome Extension" | "Learning" => YELLOW,
        "PyTorch" | "Failed Experiment" => RED,
        "React" => CYAN,
        "Data Viz" => PINK,
        _ => DEFAULT_TAG_CLASS,
    }
}

/// Colors cycled through by technology tags, in order.
const TECH_COLORS: [&str; 6] = ["blue", "green", "purple", "orange", "red", "indigo"];

/// Color name for the technology tag at `index`.
pub fn tech_color(index: usize) -> &'static str {
    TECH_COLORS[index % TECH_COLORS.len()]
}

/// Color name for a project status; unknown statuses read as completed.
pub fn status_color(status: &str) -> &'static str {
    match status {
        "in-progress" => "blue",
        "planned" => "gray",
        _ => "green",
    }
}

/// Human label for a status: `in-progress` → `In Progress`.
pub fn status_label(status: &str) -> String {
    status
        .replace('-', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
