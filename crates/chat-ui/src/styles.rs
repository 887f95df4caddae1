//! Centralized style constants for consistent theming across the chat UI components

// Background colors with dark mode support
pub const CONTAINER_BG: &str = "bg-gray-50 dark:bg-gray-900";
pub const CARD_BG: &str = "bg-white dark:bg-gray-800";

// Text colors with dark mode support
pub const PRIMARY_TEXT: &str = "text-gray-900 dark:text-gray-100";
pub const SECONDARY_TEXT: &str = "text-gray-700 dark:text-gray-300";
pub const MUTED_TEXT: &str = "text-gray-500 dark:text-gray-400";

// Border colors with dark mode support
pub const PRIMARY_BORDER: &str = "border-gray-200 dark:border-gray-700";

// Error answers reuse the status colors
pub const ERROR_BG: &str = "bg-red-50 dark:bg-red-900";
pub const ERROR_TEXT: &str = "text-red-700 dark:text-red-300";
pub const ERROR_BORDER: &str = "border-red-200 dark:border-red-700";

// Button styles
pub const PRIMARY_BUTTON: &str = "px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white rounded-md transition-colors disabled:bg-gray-300 dark:disabled:bg-gray-600 disabled:cursor-not-allowed";
pub const SECONDARY_BUTTON: &str = "px-4 py-2 bg-gray-200 hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600 text-gray-700 dark:text-gray-300 rounded-md transition-colors disabled:opacity-50 disabled:cursor-not-allowed";

// Input styles
pub const INPUT_BASE: &str = "w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500";
pub const INPUT_COLORS: &str =
    "border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200";

// Common layout patterns
pub const FLEX_COL_GAP_2: &str = "flex flex-col gap-2";
pub const FLEX_COL_GAP_4: &str = "flex flex-col gap-4";
pub const FLEX_CENTER: &str = "flex items-center";
pub const FLEX_CENTER_GAP_2: &str = "flex items-center gap-2";

// Common spacing
pub const CARD_PADDING: &str = "p-6";
pub const STANDARD_PADDING: &str = "p-4";

// Shadows and rounded corners
pub const CARD_SHADOW: &str = "shadow-md";
pub const ROUNDED_STANDARD: &str = "rounded-lg";

// Utility function to combine multiple style constants
pub fn combine_styles(styles: &[&str]) -> String {
    styles.join(" ")
}
