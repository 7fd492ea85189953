//! Per-family style resolvers

pub mod appbar;
pub mod avatar;
pub mod card;
pub mod checkbox;
pub mod drawer;
pub mod list;
pub mod menu;
pub mod radio;
pub mod segmented;
pub mod selection;
pub mod text_input;
pub mod toggle_button;
pub mod typography;

pub use appbar::{appbar_color, Appbar, AppbarMode, AppbarStyle};
pub use avatar::{AvatarImage, AvatarStyle};
pub use card::{Card, CardCover, CardCoverStyle, CardMode, CardStyle};
pub use checkbox::{Checkbox, CheckboxStyle};
pub use drawer::{
    Badge, DrawerCollapsedItem, DrawerCollapsedItemStyle, DrawerItem, DrawerItemStyle,
    DrawerSection, DrawerSectionStyle,
};
pub use list::{
    ListIcon, ListIconStyle, ListImage, ListImageStyle, ListImageVariant, ListItem, ListItemStyle,
};
pub use menu::{MenuItem, MenuItemStyle};
pub use radio::{RadioButton, RadioButtonStyle};
pub use segmented::{Density, Segment, SegmentedButton, SegmentedButtonStyle};
pub use selection::selection_control_color;
pub use text_input::{
    InputColors, InputMetrics, LabelBackground, LabelBackgroundStyle, TextInput, TextInputMode,
    TextInputStyle,
};
pub use toggle_button::{toggle_button_color, ToggleButton, ToggleButtonStyle};
pub use typography::{StyledText, TextStyle, TextVariant};
