/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//!
//! The Crucible API server library.
//!

// NOTE on pub vs non-pub mods:
//
// crucible-api is a CLI crate, not a lib. lib.rs only exists to export the
// main `run()` function and the command-line `Options` for main.rs. Modules
// stay private ("mod", not "pub mod") so that dead-code detection keeps
// working for anything marked `pub` within them.

mod api;
mod cfg;
mod errors;
mod handlers;
mod logging;
mod run;
mod web;

// Save typing
pub(crate) use errors::{ApiError, ApiResult};

// Stuff needed by main.rs
pub use crate::{cfg::Options, run::run};
