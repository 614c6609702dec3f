//
//  zenhub-cli
//  api/models/milestones.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Start date of a GitHub milestone, as tracked by ZenHub.
///
/// Serves as both the response of the get/set calls and the body of the set
/// call; dates are written as UTC with a `Z` suffix.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use zenhub_cli::api::models::StartDate;
///
/// let body = StartDate::new(Utc.with_ymd_and_hms(2019, 11, 1, 7, 0, 0).unwrap());
/// assert_eq!(
///     serde_json::to_string(&body).unwrap(),
///     r#"{"start_date":"2019-11-01T07:00:00Z"}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartDate {
    #[serde(with = "crate::util::utc")]
    pub start_date: DateTime<Utc>,
}

impl StartDate {
    pub fn new(start_date: DateTime<Utc>) -> Self {
        Self { start_date }
    }
}
