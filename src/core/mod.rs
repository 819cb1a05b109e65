pub mod etl;
pub mod graphql;
pub mod grid;
pub mod pipeline;
pub mod stats;
pub mod template;

pub use crate::domain::model::{
    AccountSnapshot, ContributionCalendar, DayRecord, HeaderRender, HeaderStats, RenderedCell,
    WeekRecord,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
