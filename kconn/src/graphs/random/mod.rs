/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Random graphs.

mod configuration;
pub use configuration::ConfigurationModel;

mod er;
pub use er::ErdosRenyi;

mod shell;
pub use shell::RandomShell;
