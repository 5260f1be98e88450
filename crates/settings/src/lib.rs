mod store;
mod value;

pub use store::{translations, SettingsError, SettingsStore, SyncMode};
pub use store::{
    SETTING_FIND_REPLACE_CASE_SENSITIVE, SETTING_FIND_REPLACE_FIND_TEXT,
    SETTING_FIND_REPLACE_FORWARD, SETTING_FIND_REPLACE_REGEXP, SETTING_FIND_REPLACE_REPLACE,
    SETTING_FIND_REPLACE_REPLACE_TEXT, SETTING_FIND_REPLACE_WHOLE_WORDS, SETTING_LAST_FILE,
    SETTING_LAST_FILES, SETTING_OPEN_LAST_FILE, SETTING_PREVIEW_DELAY, SETTING_TRANSLATION,
};
pub use value::{SettingScalar, SettingValue};
