// ABOUTME: UI components for the TUI: navigation shell, pages, and overlays

pub mod coach;
pub mod dashboard;
pub mod form_checker;
pub mod help;
pub mod home;
pub mod layout;
pub mod navigation;
pub mod profile;
pub mod progress;

pub use coach::CoachComponent;
pub use dashboard::DashboardComponent;
pub use form_checker::FormCheckerComponent;
pub use help::HelpComponent;
pub use home::HomeComponent;
pub use layout::LayoutComponent;
pub use navigation::NavigationComponent;
pub use profile::ProfileComponent;
pub use progress::ProgressComponent;
