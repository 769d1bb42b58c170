/*
Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! The two-pass core: symbol table construction and address assignment
//! (pass 1), instruction/data encoding (pass 2), and the per-format
//! encoder dispatch both passes share.

pub mod encoder;
pub mod location;
pub mod pass1;
pub mod pass2;
pub mod symbol_table;

pub use pass1::build_symbol_table;
pub use pass2::generate_bytecode;
