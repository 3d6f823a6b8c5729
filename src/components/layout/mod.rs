pub mod announcement_banner;
pub mod footer;
pub mod logo;
pub mod navbar;
pub mod process_section;
pub mod scroll_watch;
pub mod site_layout;

pub use announcement_banner::AnnouncementBanner;
pub use footer::Footer;
pub use logo::Logo;
pub use navbar::Navbar;
pub use process_section::{ProcessSection, ProcessStep, PROCESS_STEPS};
pub use scroll_watch::WindowScrollHost;
pub use site_layout::SiteLayout;
