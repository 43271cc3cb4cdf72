pub mod board_routes;
