//! Simple test infrastructure for basic testing

use std::sync::{Arc, Once};

use SavvyTrends::config::SkillConfig;
use SavvyTrends::handlers::{SkillDispatcher, TrendsSkill};
use SavvyTrends::services::{BestSellerSource, ServiceFactory, TrendsSource};

use super::test_data::TEST_APPLICATION_ID;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Dispatcher over the given sources, checking the test application id
pub fn create_dispatcher(
    trends: Arc<dyn TrendsSource>,
    best_sellers: Arc<dyn BestSellerSource>,
) -> SkillDispatcher {
    init_test_env();

    let services = ServiceFactory::with_sources(trends, best_sellers);
    let skill = TrendsSkill::new(Arc::new(SkillConfig::default()), services, 9)
        .expect("Failed to create skill");

    SkillDispatcher::new(Some(TEST_APPLICATION_ID.to_string()), Arc::new(skill))
}
