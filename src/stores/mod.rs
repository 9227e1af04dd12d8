// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory collections mirrored to slot storage on every mutation.

pub mod categories;
pub mod session;
pub mod transactions;

pub use categories::CategoryStore;
pub use session::SessionStore;
pub use transactions::RecordStore;
