pub mod shared {
    pub mod core {
        pub mod error_body;
    }
}

pub mod modules {
    pub mod catalog {
        pub mod core {
            pub mod collation;
            pub mod draft;
            pub mod messages;
            pub mod product;
            pub mod state;
            pub mod view;
        }
        pub mod ports;
        pub mod controller;
        pub mod use_cases {
            pub mod load_products {
                pub mod handler;
            }
            pub mod edit_draft {
                pub mod handler;
            }
            pub mod submit_product {
                pub mod handler;
            }
            pub mod delete_product {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod command;
                pub mod console;
            }
            pub mod outbound {
                pub mod http_product_store;
                pub mod in_memory_product_store;
            }
        }
    }
    pub mod products_api {
        pub mod core {
            pub mod missing_letter;
            pub mod product;
            pub mod rules;
        }
        pub mod use_cases {
            pub mod manage_products {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod repository;
                pub mod repository_in_memory;
            }
        }
    }
}

pub mod shell;
