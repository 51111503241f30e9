// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Notewerk Contributors
//
// Service layer: wires the launch router, the command bridge, and the
// persisted settings to whatever owns the host lifecycle callbacks.

pub mod data_dir;
pub mod host_services;
