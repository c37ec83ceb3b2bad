pub mod const_str;
