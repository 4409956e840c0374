// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod ledger_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod account_model;
        pub(crate) mod cash_location_model;
        pub(crate) mod counterparty_model;
        pub(crate) mod journal_post_model;
        pub(crate) mod store_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod journal_input_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod account;
        pub(crate) mod cash_location;
        pub(crate) mod counterparty;
        pub(crate) mod debt;
        pub(crate) mod entry_context;
        pub(crate) mod journal_entry;
        pub(crate) mod reference_data;
        pub(crate) mod transaction_line;
    }
    pub(crate) mod logic {
        pub(crate) mod amount_text;
        pub(crate) mod grid_engine;
        pub(crate) mod mapping_gate;
    }
    pub(crate) mod repositories {
        pub(crate) mod journal_input_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod submit_journal_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod amount_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::account::*;
        pub use crate::domain::entities::cash_location::*;
        pub use crate::domain::entities::counterparty::*;
        pub use crate::domain::entities::debt::*;
        pub use crate::domain::entities::entry_context::*;
        pub use crate::domain::entities::journal_entry::*;
        pub use crate::domain::entities::reference_data::*;
        pub use crate::domain::entities::transaction_line::*;
    }

    pub mod logic {
        pub use crate::domain::logic::amount_text::*;
        pub use crate::domain::logic::grid_engine::*;
        pub use crate::domain::logic::mapping_gate::*;
    }

    pub mod repositories {
        pub use crate::data::repositories::journal_input_repository_impl::*;
        pub use crate::domain::repositories::journal_input_repository::*;
    }

    pub mod usecases {
        pub use crate::domain::usecases::submit_journal_usecase::*;
    }

    pub mod datasources {
        pub use crate::data::datasources::ledger_datasource::*;
    }

    pub mod models {
        pub use crate::data::models::account_model::*;
        pub use crate::data::models::cash_location_model::*;
        pub use crate::data::models::counterparty_model::*;
        pub use crate::data::models::journal_post_model::*;
        pub use crate::data::models::store_model::*;
    }

    pub mod fmt {
        pub use crate::presentation::amount_fmt::*;
    }
}
