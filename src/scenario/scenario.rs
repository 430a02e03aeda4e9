use crate::campus::map::CampusMap;
use crate::campus::records::CampusRecords;
use crate::error::Result;

/// A source of campus records.
pub trait Scenario {
    /// Short human readable origin, used in logs and error context.
    fn describe(&self) -> String;

    fn records(&self) -> Result<CampusRecords>;

    fn build(&self) -> Result<CampusMap> {
        CampusMap::build(self.records()?)
    }
}
