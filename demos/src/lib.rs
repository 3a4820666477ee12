// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable walkthroughs for the Thicket crates live in this package's
//! `examples/` directory; this library is intentionally empty.
