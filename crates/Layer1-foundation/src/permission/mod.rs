//! Permission system for navgate
//!
//! - `types`: 권한 집합과 매칭 방식 (PermissionSet, PermissionMatch)
//! - `checker`: 요구 권한 충족 여부 판단 (PermissionChecker)
//! - `table`: 경로별 정적 권한 매핑 (PermissionTable)
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use navgate_foundation::permission::{PermissionChecker, PermissionMatch, PermissionTable};
//!
//! let table = PermissionTable::new().with_path("/orders", ["view-x"]);
//! let checker = PermissionChecker::new(PermissionMatch::Any);
//!
//! let actual = table.permissions_for("/orders");
//! assert!(checker.check(&actual, &["view-x".to_string()]));
//! ```

mod checker;
mod table;
mod types;

pub use checker::{PermissionChecker, PermissionDenied};
pub use table::{PermissionTable, PERMISSIONS_FILE};
pub use types::{PermissionMatch, PermissionSet};
