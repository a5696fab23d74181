pub mod shared {
    pub mod core {
        pub mod selectors;
        pub mod validation;
    }
    pub mod infrastructure {
        pub mod account_store;
    }
}

pub mod modules {
    pub mod accounts {
        pub mod core {
            pub mod account;
        }
        pub mod use_cases {
            pub mod register_account {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod register_page {
        pub mod core {
            pub mod call_match;
        }
        pub mod ports;
        pub mod scenarios {
            pub mod menu;
            pub mod register_form;
            pub mod submit;
            pub mod support;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod chromium;
            }
        }
    }
}

pub mod shell;
