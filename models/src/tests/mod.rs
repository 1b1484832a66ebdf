mod launch_config;
