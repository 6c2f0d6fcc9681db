pub mod shared {
    pub mod infrastructure {
        pub mod product_store;
    }
}

pub mod modules {
    pub mod products {
        pub mod core {
            pub mod product;
            pub mod versioning;
        }
        pub mod application {
            pub mod errors;
            pub mod version_guard;
        }
        pub mod use_cases {
            pub mod create_product {
                pub mod command;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_product {
                pub mod command;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_product {
                pub mod command;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_product {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_products {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
        }
    }
}

pub mod shell;
