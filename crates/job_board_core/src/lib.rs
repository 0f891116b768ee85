pub mod context;
pub mod detail;
pub mod domain;
pub mod filters;
pub mod guard;
pub mod lifecycle;
pub mod login;
pub mod navigation;
pub mod ports;
pub mod search;
pub mod session;
pub mod view;

pub use context::ClientContext;
pub use detail::{DetailController, DetailSnapshot};
pub use domain::{
    Credentials, EmploymentType, JobDetail, JobListing, LifeAtCompany, Profile, SalaryFloor,
    SessionToken, Skill,
};
pub use filters::{FilterSelection, FilterState};
pub use guard::{Access, AuthGuard};
pub use lifecycle::{LifecycleState, RequestLifecycle, RequestTicket, Status};
pub use login::{logout, LoginController, LoginForm, LoginStatus};
pub use navigation::{HistoryNavigator, Route};
pub use ports::{JobBoardService, Navigator, PortError, PortResult, SessionStore};
pub use search::{JobSearchController, SearchSnapshot};
pub use session::MemorySessionStore;
pub use view::{panel, Panel, RetryTarget};
