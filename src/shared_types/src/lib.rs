// Generated TypeScript bindings are written to ./generated by build.rs
