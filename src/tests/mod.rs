mod shortnumberinfo_tests;

use crate::{
    MetadataStore, PhoneNumberUtil,
    generated::metadata::{TEST_METADATA, TEST_SHORT_NUMBER_METADATA},
};

static ONCE: std::sync::Once = std::sync::Once::new();

// This setup function simulates getting the PhoneNumberUtil instance for each test.
fn get_phone_util() -> PhoneNumberUtil {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );

    let metadata_store = MetadataStore::from_text(TEST_METADATA, TEST_SHORT_NUMBER_METADATA)
        .expect("Metadata should be valid");
    PhoneNumberUtil::new_for_metadata(metadata_store)
}
