//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronRight as ChevronRight, LuDownload as Download, LuEllipsisVertical as More,
        LuEye as Eye, LuFile as File, LuFolder as Folder, LuHardDrive as Space,
        LuHouse as Home, LuImage as FileImage, LuInfo as Info, LuTrash2 as Trash,
        LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronRight as ChevronRight, BsDownload as Download, BsEye as Eye,
        BsFileEarmark as File, BsFileEarmarkImage as FileImage, BsFolderFill as Folder,
        BsHddFill as Space, BsHouseFill as Home, BsInfoCircle as Info,
        BsThreeDotsVertical as More, BsTrash as Trash, BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(SPACE, Space);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(MORE, More);
themed_icon!(CLOSE, Close);
themed_icon!(DOWNLOAD, Download);
themed_icon!(UPLOAD, Upload);
themed_icon!(EYE, Eye);
themed_icon!(INFO, Info);
themed_icon!(TRASH, Trash);
